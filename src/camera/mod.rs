pub mod opencv_stream;
pub mod stream_url;

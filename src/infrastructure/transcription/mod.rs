mod whisper_http_engine;

pub use whisper_http_engine::WhisperHttpEngine;

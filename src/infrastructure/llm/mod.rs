mod watsonx_engine;

pub use watsonx_engine::WatsonxEngine;

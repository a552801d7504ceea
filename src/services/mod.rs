pub mod materializer;

pub use materializer::{
    load_config, locate_config, render, ConfigMaterializer, MaterializeReport, MaterializedFile,
    RunMode,
};

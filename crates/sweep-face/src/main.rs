use anyhow::Result;

use sweep_engine::device::GpuInit;
use sweep_engine::logging::{init_logging, LoggingConfig};
use sweep_engine::window::{Runtime, RuntimeConfig};

mod face;

use face::FaceApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "sweep".to_string(),
        width: face::FACE_WIDTH,
        height: face::FACE_HEIGHT,
    };

    Runtime::run(config, GpuInit::default(), FaceApp::new())
}

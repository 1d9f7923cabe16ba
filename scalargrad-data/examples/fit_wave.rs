//! Fits a 1-20-1 tanh MLP to `sin(x) + 0.5 cos(2x)` sampled on [0, 10).
//!
//! Run with `RUST_LOG=info cargo run --example fit_wave` to see the loss
//! every 500 epochs.

use scalargrad_core::train::{Trainer, TrainingConfig};
use scalargrad_core::ScalarGradError;
use scalargrad_data::{wave, WaveDataset};

fn main() -> Result<(), ScalarGradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data = WaveDataset::default();
    let config = TrainingConfig::default();
    let model = config.build_model()?;
    let optimizer = config.build_optimizer(&model)?;
    let mut trainer = Trainer::new(model, optimizer, config)?;

    let report = trainer.fit(&data.pairs())?;
    println!(
        "Trained {} epochs, final loss {:.6}",
        report.epochs_run, report.final_loss
    );

    println!("=== After Training ===");
    for x in (0..=10).step_by(2).map(f64::from) {
        let pred = trainer.predict(x)?;
        println!("x={}, pred={:.4}, actual={:.4}", x, pred, wave(x));
    }
    Ok(())
}

use super::*;
use crate::nn::{Activation, Linear, Sequential};
use crate::optim::SgdOptimizer;
use approx::assert_relative_eq;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn line_data() -> Vec<(f64, f64)> {
    (0..5).map(|i| i as f64 * 0.2).map(|x| (x, 2.0 * x + 1.0)).collect()
}

fn zero_linear_model() -> Result<Sequential, ScalarGradError> {
    let mut model = Sequential::new();
    model.push(Linear::from_values(vec![vec![0.0]], vec![0.0])?, Activation::Identity)?;
    Ok(model)
}

fn trainer_for(
    model: Sequential,
    config: TrainingConfig,
) -> Result<Trainer<Sequential, SgdOptimizer>, ScalarGradError> {
    let optimizer = config.build_optimizer(&model)?;
    Trainer::new(model, optimizer, config)
}

#[test]
fn test_fit_learns_a_line() -> Result<(), ScalarGradError> {
    init_logger();
    let config = TrainingConfig::default()
        .with_epochs(500)
        .with_learning_rate(0.5)
        .with_log_every(100);
    let mut trainer = trainer_for(zero_linear_model()?, config)?;

    let report = trainer.fit(&line_data())?;
    assert_eq!(report.epochs_run, 500);
    assert!(!report.cancelled);
    assert!(report.final_loss < report.losses[0].1);
    assert!(report.final_loss < 1e-4, "final loss {}", report.final_loss);
    assert_relative_eq!(trainer.predict(0.5)?, 2.0, epsilon = 1e-2);
    Ok(())
}

#[test]
fn test_report_records_logged_and_last_epochs() -> Result<(), ScalarGradError> {
    init_logger();
    let config = TrainingConfig::default()
        .with_epochs(10)
        .with_learning_rate(0.1)
        .with_log_every(4);
    let mut trainer = trainer_for(zero_linear_model()?, config)?;
    let report = trainer.fit(&line_data())?;

    let epochs: Vec<usize> = report.losses.iter().map(|&(e, _)| e).collect();
    assert_eq!(epochs, vec![0, 4, 8, 9]);
    assert_eq!(report.losses[3].1, report.final_loss);
    // First epoch: w = b = 0, so the loss is the mean of y^2.
    let expected: f64 = line_data().iter().map(|&(_, y)| y * y).sum::<f64>() / 5.0;
    assert_relative_eq!(report.losses[0].1, expected);
    Ok(())
}

#[test]
fn test_fit_clears_gradients_between_epochs() -> Result<(), ScalarGradError> {
    let config = TrainingConfig::default().with_epochs(3).with_learning_rate(0.1);
    let mut trainer = trainer_for(zero_linear_model()?, config)?;
    trainer.fit(&line_data())?;
    assert!(trainer.model().parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}

#[test]
fn test_cancel_flag_stops_training() -> Result<(), ScalarGradError> {
    let flag = Arc::new(AtomicBool::new(true));
    let config = TrainingConfig::default().with_epochs(100);
    let mut trainer = trainer_for(zero_linear_model()?, config)?.with_cancel_flag(flag.clone());

    let report = trainer.fit(&line_data())?;
    assert!(report.cancelled);
    assert_eq!(report.epochs_run, 0);
    assert!(report.losses.is_empty());

    flag.store(false, Ordering::Relaxed);
    let report = trainer.fit(&line_data())?;
    assert!(!report.cancelled);
    assert_eq!(report.epochs_run, 100);
    Ok(())
}

#[test]
fn test_diverging_loss_is_reported() -> Result<(), ScalarGradError> {
    init_logger();
    let config = TrainingConfig::default()
        .with_epochs(1_000)
        .with_learning_rate(1e6);
    let mut trainer = trainer_for(zero_linear_model()?, config)?;
    let result = trainer.fit(&line_data());
    assert!(
        matches!(result, Err(ScalarGradError::NonFiniteLoss { epoch, .. }) if epoch > 0),
        "unexpected result {:?}",
        result
    );
    Ok(())
}

#[test]
fn test_fit_rejects_bad_inputs() -> Result<(), ScalarGradError> {
    let mut trainer = trainer_for(zero_linear_model()?, TrainingConfig::default())?;
    assert_eq!(trainer.fit(&[]).err(), Some(ScalarGradError::EmptyDataset));

    let mut wide = Sequential::new();
    wide.push(Linear::from_values(vec![vec![1.0, 1.0]], vec![0.0, 0.0])?, Activation::Identity)?;
    let mut trainer = trainer_for(wide, TrainingConfig::default())?;
    assert!(matches!(
        trainer.fit(&line_data()),
        Err(ScalarGradError::ShapeMismatch { expected: 1, actual: 2, .. })
    ));
    assert!(trainer.predict(0.0).is_err());
    Ok(())
}

#[test]
fn test_new_validates_config() -> Result<(), ScalarGradError> {
    let model = zero_linear_model()?;
    let optimizer = SgdOptimizer::new(model.parameters().into_iter().cloned().collect(), 0.1)?;
    let result = Trainer::new(model, optimizer, TrainingConfig::default().with_epochs(0));
    assert!(matches!(result, Err(ScalarGradError::InvalidConfig(_))));
    Ok(())
}

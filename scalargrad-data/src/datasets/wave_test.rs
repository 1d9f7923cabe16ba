use super::*;
use approx::assert_relative_eq;

#[test]
fn test_wave_values() {
    assert_relative_eq!(wave(0.0), 0.5);
    assert_relative_eq!(wave(std::f64::consts::FRAC_PI_2), 1.0 - 0.5, epsilon = 1e-12);
}

#[test]
fn test_default_grid() -> Result<(), ScalarGradError> {
    let data = WaveDataset::default();
    assert_eq!(data, WaveDataset::grid(100, 0.1)?);
    assert_eq!(data.len(), 100);
    let (x, y) = data.get(99)?;
    assert_relative_eq!(x, 9.9, epsilon = 1e-12);
    assert_relative_eq!(y, wave(x));
    assert_eq!(
        data.get(100),
        Err(ScalarGradError::IndexOutOfBounds { index: 100, len: 100 })
    );
    Ok(())
}

#[test]
fn test_grid_rejects_bad_arguments() {
    assert_eq!(WaveDataset::grid(0, 0.1), Err(ScalarGradError::EmptyDataset));
    assert!(matches!(
        WaveDataset::grid(10, 0.0),
        Err(ScalarGradError::InvalidConfig(_))
    ));
    assert!(matches!(
        WaveDataset::grid(10, f64::NAN),
        Err(ScalarGradError::InvalidConfig(_))
    ));
}

#[test]
fn test_noise_is_seeded() -> Result<(), ScalarGradError> {
    let clean = WaveDataset::grid(50, 0.2)?;
    let a = clean.clone().with_noise(0.1, 3)?;
    let b = clean.clone().with_noise(0.1, 3)?;
    let c = clean.clone().with_noise(0.1, 4)?;
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.inputs(), clean.inputs());
    assert_ne!(a.targets(), clean.targets());
    Ok(())
}

#[test]
fn test_noise_rejects_negative_std() -> Result<(), ScalarGradError> {
    let data = WaveDataset::grid(5, 1.0)?;
    for std_dev in [-1.0, -1e-9, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(
                data.clone().with_noise(std_dev, 0),
                Err(ScalarGradError::InvalidConfig(_))
            ),
            "std_dev {} should be rejected",
            std_dev
        );
    }
    // Zero noise is allowed and leaves the targets unchanged.
    assert_eq!(data.clone().with_noise(0.0, 0)?, data);
    Ok(())
}

#[test]
fn test_pairs() -> Result<(), ScalarGradError> {
    let data = WaveDataset::grid(3, 0.5)?;
    let pairs = data.pairs();
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[1], (0.5, wave(0.5)));
    Ok(())
}

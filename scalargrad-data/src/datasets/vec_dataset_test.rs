use super::*;

#[test]
fn test_vec_dataset_get_valid_index() -> Result<(), ScalarGradError> {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.get(0)?, 10);
    assert_eq!(dataset.get(2)?, 30);
    Ok(())
}

#[test]
fn test_vec_dataset_get_invalid_index() {
    let dataset = VecDataset::new(vec![(0.0, 1.0), (1.0, 2.0)]);
    assert_eq!(
        dataset.get(2),
        Err(ScalarGradError::IndexOutOfBounds { index: 2, len: 2 })
    );
}

#[test]
fn test_vec_dataset_empty() {
    let dataset: VecDataset<i32> = Vec::new().into();
    assert!(dataset.is_empty());
    assert!(dataset.get(0).is_err());
}

#[test]
fn test_vec_dataset_into_inner() {
    let dataset = VecDataset::from(vec!["a", "b"]);
    assert_eq!(dataset.as_slice(), &["a", "b"]);
    assert_eq!(dataset.into_inner(), vec!["a", "b"]);
}

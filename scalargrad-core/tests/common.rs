use scalargrad_core::Node;

// Each test binary includes this module but not every one uses every helper.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn leaf(value: f64, label: &str) -> Node {
    Node::labeled(value, label)
}

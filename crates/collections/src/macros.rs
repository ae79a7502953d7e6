#[macro_export]
macro_rules! boxnode {
    ( $key: expr, $value: expr) => {
        Box::new($crate::node!($key, $value))
    };
}

#[macro_export]
macro_rules! node {
    ( $key: expr, $value: expr) => {
        $crate::chain::Node {
            key: $key,
            value: $value.into(),
            next: None,
        }
    };
}

/// Build a [`ParameterMap`](crate::ParameterMap) from `key => value` pairs.
macro_rules! params {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut params = $crate::types::ParameterMap::new();
        $(params.insert($key.to_string(), $value.to_string());)*
        params
    }};
}

mod builder;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

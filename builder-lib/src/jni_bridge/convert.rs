//! Java to Rust conversions
//!
//! `JavaStr` guards release the JVM string buffer when dropped, so every
//! exit path out of these helpers gives the buffer back.

use crate::error::Result;
use crate::types::ParameterMap;
use jni::objects::{JObject, JString};
use jni::sys::jstring;
use jni::JNIEnv;
use log::error;
use std::ptr;

/// Copy a Java string, `null` reads as empty
pub fn read_string(env: &mut JNIEnv, value: &JString) -> Result<String> {
    if value.is_null() {
        return Ok(String::new());
    }
    let value = env.get_string(value)?;
    Ok(value.into())
}

/// Copy a `java.util.Map<String, String>`, `null` reads as empty
pub fn read_map(env: &mut JNIEnv, map: &JObject) -> Result<ParameterMap> {
    let mut params = ParameterMap::new();
    if map.is_null() {
        return Ok(params);
    }

    let map = env.get_map(map)?;
    let mut entries = map.iter(env)?;
    while let Some((key, value)) = entries.next(env)? {
        let key = JString::from(key);
        let value = JString::from(value);
        params.insert(read_string(env, &key)?, read_string(env, &value)?);
        env.delete_local_ref(key)?;
        env.delete_local_ref(value)?;
    }
    Ok(params)
}

/// Hand a Rust string back to Java, `null` if the JVM cannot allocate it
pub fn to_jstring(env: &mut JNIEnv, value: &str) -> jstring {
    match env.new_string(value) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            error!("Failed to create JString: {}", e);
            ptr::null_mut()
        }
    }
}

//! Entry points for `com.kotlinenjoer.builder.Builder`
//!
//! Each call copies its arguments out of the JVM, runs the pure builder code
//! and hands back a new Java string. A failure while marshalling is logged
//! and answered with `null`.

use super::convert::{read_map, read_string, to_jstring};
use super::types::{builder, init_logger, install};
use crate::error::Result;
use crate::types::BuilderConfig;
use jni::objects::{JObject, JString};
use jni::sys::{jboolean, jstring, JNI_FALSE, JNI_TRUE};
use jni::JNIEnv;
use log::{debug, error, info, warn};
use std::ptr;

/// Turn an operation result into a Java string, or `null` on error
fn respond(env: &mut JNIEnv, operation: &str, result: Result<String>) -> jstring {
    match result {
        Ok(value) => to_jstring(env, &value),
        Err(e) => {
            error!("{}: {}", operation, e);
            ptr::null_mut()
        }
    }
}

/// JNI: Build a query string
///
/// `external fun buildQuery(domain: String, params: Map<String, String>): String`
#[no_mangle]
pub extern "C" fn Java_com_kotlinenjoer_builder_Builder_buildQuery(
    mut env: JNIEnv,
    _this: JObject,
    domain: JString,
    params: JObject,
) -> jstring {
    init_logger();

    let result = (|| -> Result<String> {
        let params = read_map(&mut env, &params)?;
        let domain = read_string(&mut env, &domain)?;
        debug!("buildQuery: {} params", params.len());
        Ok(builder().build(&domain, params))
    })();

    respond(&mut env, "buildQuery", result)
}

/// JNI: Set one parameter in a query string
///
/// `external fun replaceParamValue(query: String, paramName: String, paramValue: String): String`
#[no_mangle]
pub extern "C" fn Java_com_kotlinenjoer_builder_Builder_replaceParamValue(
    mut env: JNIEnv,
    _this: JObject,
    query: JString,
    param_name: JString,
    param_value: JString,
) -> jstring {
    init_logger();

    let result = (|| -> Result<String> {
        let query = read_string(&mut env, &query)?;
        let name = read_string(&mut env, &param_name)?;
        let value = read_string(&mut env, &param_value)?;
        Ok(builder().replace_param_value(&query, &name, &value))
    })();

    respond(&mut env, "replaceParamValue", result)
}

/// JNI: Read one parameter from a query string, empty if absent
///
/// `external fun getParamValue(query: String, paramName: String): String`
#[no_mangle]
pub extern "C" fn Java_com_kotlinenjoer_builder_Builder_getParamValue(
    mut env: JNIEnv,
    _this: JObject,
    query: JString,
    param_name: JString,
) -> jstring {
    init_logger();

    let result = (|| -> Result<String> {
        let query = read_string(&mut env, &query)?;
        let name = read_string(&mut env, &param_name)?;
        Ok(builder().get_param_value(&query, &name))
    })();

    respond(&mut env, "getParamValue", result)
}

/// JNI: Install a TOML config for all later calls
///
/// `external fun configure(config: String): Boolean`
///
/// Returns false if the config does not parse, or if a config is already in
/// place (including the default one picked up by an earlier call).
#[no_mangle]
pub extern "C" fn Java_com_kotlinenjoer_builder_Builder_configure(
    mut env: JNIEnv,
    _this: JObject,
    config: JString,
) -> jboolean {
    init_logger();

    let parsed = read_string(&mut env, &config).and_then(|s| s.parse::<BuilderConfig>());
    let config = match parsed {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return JNI_FALSE;
        }
    };

    if !install(config) {
        warn!("Builder already configured, ignoring new config");
        return JNI_FALSE;
    }

    info!("Builder configured");
    JNI_TRUE
}

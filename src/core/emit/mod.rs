//! Output serializers.
//!
//! One serializer handles a whole run. The env styles stream as parameters
//! arrive; the INI and Java styles buffer an ordered map and serialize once
//! at the end; the dir style writes one file per parameter.

pub mod dir;
pub mod env;
pub mod ini;
pub mod java;

use tracing::debug;

use crate::core::store::Parameter;

/// Log an accepted parameter at debug level, redacting secret values.
fn debug_value(param: &Parameter, key: &str) {
    if param.kind.is_secret() {
        debug!("{}: {} = ********", param.name, key);
    } else {
        debug!("{}: {} = {}", param.name, key, param.value);
    }
}

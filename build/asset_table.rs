// build/asset_table.rs
//
// Shared between `build.rs` and the asset table tests.

use std::path::Path;

/// Logical name the payload is registered under, whatever the file is called
/// on disk. The launcher looks it up by this name.
pub const PAYLOAD_NAME: &str = "Connect-4.jar";

/// Render the `EMBEDDED_ASSETS` table. `payload` must be an absolute path.
pub fn render(payload: Option<&Path>) -> String {
    let mut table = String::from("pub(crate) static EMBEDDED_ASSETS: &[(&str, &[u8])] = &[\n");
    if let Some(path) = payload {
        table.push_str(&format!(
            "    ({:?}, include_bytes!({:?})),\n",
            PAYLOAD_NAME,
            path.to_string_lossy()
        ));
    }
    table.push_str("];\n");
    table
}

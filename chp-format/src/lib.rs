//! CHP listing renderer
//!
//! Turns a decoded [`Circuit`] into a netlist-style listing:
//!
//! ```text
//! chip1 {
//!     PIN chip1_pin1<0>
//!     ...
//!     AND chip1_and0_in0<0> chip1_and0_in1<1> => chip1_pin8<0>
//!     chip2 {
//!         ...
//!     }
//!     Node chip1_pin1<0> => chip2_pin1<0>
//! }
//! ```

mod config;
mod formatter;
mod printer;

pub use config::{IndentStyle, RenderConfig};
pub use formatter::format_circuit;

use chp_core::{Circuit, DecodeOptions, FormatError, decode_with};
use std::fmt;
use tracing::debug;

/// Render a circuit with default configuration
pub fn render(circuit: &Circuit) -> String {
    render_with_config(circuit, &RenderConfig::default())
}

/// Render a circuit with custom configuration
pub fn render_with_config(circuit: &Circuit, config: &RenderConfig) -> String {
    debug!(chip = %circuit.chip.name, pins = circuit.pins.len(), "rendering listing");
    format_circuit(circuit, config)
}

/// Decode raw bytes and render them in one step
pub fn render_bytes(
    bytes: &[u8],
    options: &DecodeOptions,
    config: &RenderConfig,
) -> Result<String, FormatError> {
    let circuit = decode_with(bytes, options)?;
    Ok(render_with_config(&circuit, config))
}

/// `Display` adapter using the default configuration
pub struct Listing<'a>(pub &'a Circuit);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.0))
    }
}

// WASM bindings for docso.
//
// Provides a `WasmDocso` class exported via wasm-bindgen that wraps the
// `DocsoHandle` from docso-vi, plus the free `timeInWords` function from
// docso-en. Structured return values are serialized to JavaScript values
// using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const docso = new WasmDocso();
//   docso.spellNumber(1015);          // => "một nghìn không trăm mười lăm"
//   docso.spellWords(21);             // => [{ text: "hai", role: "digit" }, ...]
//   docso.validatePhone("0909111111"); // => 1
//   docso.detectCarrier("0909111111"); // => "MOBIFONE"
//   docso.setDialect("south");
//   timeInWords(5, 47);               // => "thirteen minutes to six"

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use docso_core::WordRole;
use docso_vi::handle::{DocsoError, DocsoHandle};
use docso_vi::number::Dialect;
use docso_vi::phone::{PhoneConfig, Provider};

// ============================================================================
// Serde DTO types for JS interop
// ============================================================================

/// Serializable representation of one spelled word.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsWord {
    text: String,
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tier_power: Option<u8>,
}

/// One entry of a custom carrier prefix table.
#[derive(Deserialize)]
struct JsProviderPrefixes {
    provider: String,
    prefixes: Vec<String>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn role_to_string(role: WordRole) -> String {
    match role {
        WordRole::Digit => "digit".to_string(),
        WordRole::ReducedDigit => "reducedDigit".to_string(),
        WordRole::Ten => "ten".to_string(),
        WordRole::TensMarker => "tensMarker".to_string(),
        WordRole::Hundred => "hundred".to_string(),
        WordRole::Tier { .. } => "tier".to_string(),
        WordRole::Filler => "filler".to_string(),
        WordRole::EmptyHundreds => "emptyHundreds".to_string(),
    }
}

fn docso_error_to_js(e: DocsoError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmDocso
// ============================================================================

/// Vietnamese number speller and phone utilities for WebAssembly.
#[wasm_bindgen]
pub struct WasmDocso {
    handle: DocsoHandle,
}

#[wasm_bindgen]
impl WasmDocso {
    /// Create a new instance with northern reading style and the default
    /// carrier table.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmDocso, JsError> {
        let handle = DocsoHandle::new().map_err(docso_error_to_js)?;
        Ok(WasmDocso { handle })
    }

    /// Spell a number. Throws for negative, fractional or non-finite input.
    #[wasm_bindgen(js_name = "spellNumber")]
    pub fn spell_number(&self, n: f64) -> Result<String, JsError> {
        self.handle.spell_number_f64(n).map_err(docso_error_to_js)
    }

    /// Spell a number given as a decimal string (for values above 2^53).
    #[wasm_bindgen(js_name = "spellNumberStr")]
    pub fn spell_number_str(&self, input: &str) -> Result<String, JsError> {
        self.handle.spell_number_str(input).map_err(docso_error_to_js)
    }

    /// Spell a number as an array of `{ text, role, tierPower? }` objects.
    #[wasm_bindgen(js_name = "spellWords")]
    pub fn spell_words(&self, n: f64) -> Result<JsValue, JsError> {
        let n = docso_core::cardinal_from_f64(n).map_err(|e| JsError::new(&e.to_string()))?;
        let words: Vec<JsWord> = self
            .handle
            .spell_words(n)
            .iter()
            .map(|w| JsWord {
                text: w.text.to_string(),
                role: role_to_string(w.role),
                tier_power: match w.role {
                    WordRole::Tier { power } => Some(power),
                    _ => None,
                },
            })
            .collect();
        serde_wasm_bindgen::to_value(&words).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Validate a phone number.
    ///
    /// Returns -2 (too short), -1 (too long), 0 (invalid) or 1 (valid).
    #[wasm_bindgen(js_name = "validatePhone")]
    pub fn validate_phone(&self, raw: &str) -> i32 {
        self.handle.validate_phone(raw).code()
    }

    /// Carrier name for a phone number, or null when unknown.
    #[wasm_bindgen(js_name = "detectCarrier")]
    pub fn detect_carrier(&self, raw: &str) -> Option<String> {
        self.handle.detect_carrier(raw).map(|p| p.as_str().to_string())
    }

    /// Mask all but the last three digits.
    #[wasm_bindgen(js_name = "maskPhone")]
    pub fn mask_phone(&self, raw: &str) -> String {
        self.handle.mask_phone(raw)
    }

    /// Group a ten-digit phone number as `dddd ddd ddd`.
    #[wasm_bindgen(js_name = "formatPhone")]
    pub fn format_phone(&self, raw: &str) -> String {
        self.handle.format_phone(raw)
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        DocsoHandle::get_version().to_string()
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Select the reading style: "north" or "south".
    #[wasm_bindgen(js_name = "setDialect")]
    pub fn set_dialect(&mut self, name: &str) -> Result<(), JsError> {
        let dialect: Dialect = name.parse().map_err(|e| JsError::new(&format!("{e}")))?;
        self.handle.set_dialect(dialect);
        Ok(())
    }

    /// Replace the carrier prefix table.
    ///
    /// Expects an array of `{ provider: "VIETTEL", prefixes: ["032", ...] }`.
    #[wasm_bindgen(js_name = "setPhonePrefixes")]
    pub fn set_phone_prefixes(&mut self, table: JsValue) -> Result<(), JsError> {
        let entries: Vec<JsProviderPrefixes> =
            serde_wasm_bindgen::from_value(table).map_err(|e| JsError::new(&e.to_string()))?;
        let mut prefixes = Vec::with_capacity(entries.len());
        for entry in entries {
            let provider: Provider = entry
                .provider
                .parse()
                .map_err(|e| JsError::new(&format!("{e}")))?;
            prefixes.push((provider, entry.prefixes));
        }
        self.handle
            .set_phone_config(PhoneConfig::with_prefixes(prefixes))
            .map_err(docso_error_to_js)
    }

    /// Release resources held by this instance.
    pub fn terminate(self) {
        // Drop self, releasing all resources.
    }
}

/// Spell a 12-hour clock time in English.
#[wasm_bindgen(js_name = "timeInWords")]
pub fn time_in_words(hour: u8, minute: u8) -> Result<String, JsError> {
    docso_en::time_in_words(hour, minute).map_err(|e| JsError::new(&e.to_string()))
}

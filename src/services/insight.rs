// src/services/insight.rs
//
// Cosmetic AI blurbs. Blocking HTTP, so callers run these off the main
// thread (gio::spawn_blocking). Every failure mode - missing key, network,
// quota, unexpected body - collapses into a fixed fallback string; nothing
// here can surface as an application error.

use log::warn;
use serde_json::{json, Value};
use std::time::Duration;

const API_URL: &str =
  "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";
const API_KEY_ENV: &str = "GEMINI_API_KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

pub const INSIGHT_FALLBACK: &str =
  "The AI advisor can't be reached right now. Try again in a moment.";
pub const FUN_FACT_FALLBACK: &str = "This element has plenty of chemistry stories to tell!";

/// Short stability blurb for the atom under construction.
pub fn stability_analysis(protons: u32, neutrons: u32, element: &str) -> String {
  let prompt = format!(
    "Analyze the stability of an atom with {protons} protons and {neutrons} neutrons \
     (identified as {element}). Briefly explain the N/Z ratio and whether this is a \
     stable isotope. Keep it short and friendly for a middle-school student."
  );
  generate(&prompt).unwrap_or_else(|e| {
    warn!("Stability analysis unavailable: {}", e);
    INSIGHT_FALLBACK.to_string()
  })
}

/// One-liner trivia for the selected target element.
pub fn fun_fact(symbol: &str) -> String {
  let prompt = format!(
    "Give me one surprising, little-known fact about the element {symbol}. \
     Keep it short and engaging for a middle-school student."
  );
  generate(&prompt).unwrap_or_else(|e| {
    warn!("Fun fact unavailable: {}", e);
    FUN_FACT_FALLBACK.to_string()
  })
}

fn generate(prompt: &str) -> Result<String, String> {
  let key = std::env::var(API_KEY_ENV).map_err(|_| format!("{} is not set", API_KEY_ENV))?;

  let body = json!({
    "contents": [{ "parts": [{ "text": prompt }] }]
  });

  let client = reqwest::blocking::Client::builder()
    .timeout(REQUEST_TIMEOUT)
    .build()
    .map_err(|e| e.to_string())?;

  let response = client
    .post(format!("{}?key={}", API_URL, key))
    .json(&body)
    .send()
    .map_err(|e| e.to_string())?;

  if !response.status().is_success() {
    return Err(format!("API returned {}", response.status()));
  }

  let value: Value = response.json().map_err(|e| e.to_string())?;
  value["candidates"][0]["content"]["parts"][0]["text"]
    .as_str()
    .map(|s| s.trim().to_string())
    .ok_or_else(|| "unexpected response shape".to_string())
}

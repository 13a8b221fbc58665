use figment::Figment;
use figment::providers::{Env, Serialized};

/// Settings read as text as given, never parsed as numbers or booleans.
const TEXT_KEYS: &[&str] = &["username", "password"];

/// Configuration source: environment variables prefixed with `ORTHANC_`,
/// e.g. `ORTHANC_URL`, `ORTHANC_USERNAME`, `ORTHANC_TIMEOUT`.
pub fn get_config() -> Figment {
    let env = Env::prefixed("ORTHANC_");
    let text = env.clone().only(TEXT_KEYS);
    let figment = Figment::new().merge(env.ignore(TEXT_KEYS));
    text.iter().fold(figment, |figment, (key, value)| {
        figment.merge(Serialized::global(key.as_str(), value))
    })
}

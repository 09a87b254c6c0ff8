// Environment provider source tests
//
// These mutate process environment, so they run serially.

mod support;

use llm_handles::config::{ProviderKind, ProviderTable};
use llm_handles::{EnvProviderSource, ModelProvider, ProviderSettings, ProviderSource};
use serial_test::serial;
use std::env;
use support::RecordingFactory;

const KEY: &str = "LLM_HANDLES_TEST_PROVIDER";

fn set(value: &str) {
    // SAFETY: every test touching this variable is #[serial].
    unsafe { env::set_var(KEY, value) };
}

fn clear() {
    // SAFETY: every test touching this variable is #[serial].
    unsafe { env::remove_var(KEY) };
}

#[test]
#[serial]
fn unset_and_blank_are_absent() {
    let source = EnvProviderSource::with_key(KEY);

    clear();
    assert_eq!(source.provider_id(), None);

    set("   ");
    assert_eq!(source.provider_id(), None);
    clear();
}

#[test]
#[serial]
fn value_is_trimmed() {
    let source = EnvProviderSource::with_key(KEY);
    set(" openai \n");
    assert_eq!(source.provider_id().as_deref(), Some("openai"));
    clear();
}

#[test]
#[serial]
fn provider_is_read_on_every_request() {
    let factory = RecordingFactory::new();
    let mut provider = ModelProvider::new(
        factory.clone(),
        EnvProviderSource::with_key(KEY),
        ProviderSettings::default().with_table(ProviderTable::multi_provider()),
    );

    clear();
    let gemini = provider.primary_handle(None).unwrap();
    assert_eq!(gemini.provider(), ProviderKind::Gemini);

    set("openai");
    let openai = provider.primary_handle(None).unwrap();
    assert_eq!(openai.provider(), ProviderKind::OpenAI);
    assert_eq!(openai.model(), "gpt-4-turbo-preview");
    clear();

    assert_eq!(factory.call_count(), 2);
}

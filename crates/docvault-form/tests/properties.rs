//! Property tests over generated form input.

use std::collections::BTreeMap;

use proptest::prelude::*;

use docvault_form::{FormConfig, FormController, FormEngine};
use docvault_preset::PresetKey;

fn engine() -> FormEngine {
    FormEngine::builtin(FormConfig::default()).unwrap()
}

/// A value the preset accepts: its placeholder, or plain text when the
/// preset shows none.
fn sample_value(engine: &FormEngine, preset: PresetKey) -> String {
    match engine.registry().get(preset).placeholder() {
        "" => "Sample text".to_string(),
        placeholder => placeholder.to_string(),
    }
}

proptest! {
    /// Any built-in document filled with valid values assembles to exactly
    /// its trimmed, non-empty values, whichever optional fields are left out.
    #[test]
    fn builtin_payload_matches_trimmed_input(
        pick in any::<prop::sample::Index>(),
        include in prop::collection::vec(any::<bool>(), 32),
        lead in "[ \t]{0,3}",
        trail in "[ \t]{0,3}",
    ) {
        let engine = engine();
        let schemas: Vec<_> = engine
            .catalog()
            .list()
            .iter()
            .filter(|s| !s.is_custom())
            .collect();
        let schema = *pick.get(&schemas);

        let mut form = FormController::new(&engine);
        form.select_doc_type(schema.key.as_str()).unwrap();

        let mut expected = BTreeMap::new();
        for (i, field) in schema.fields.iter().enumerate() {
            if !field.required && !include[i % include.len()] {
                continue;
            }
            let value = sample_value(&engine, field.preset);
            form.set_value(&field.name, format!("{lead}{value}{trail}")).unwrap();
            expected.insert(field.name.clone(), value);
        }

        let payload = form.build_payload().unwrap();
        let actual: BTreeMap<String, String> = payload
            .fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        prop_assert_eq!(payload.doc_type, schema.key.as_str());
        prop_assert_eq!(actual, expected);
    }

    /// Validating twice without edits gives the same outcome.
    #[test]
    fn validation_is_repeatable(
        holder in ".{0,20}",
        account in "[0-9 ]{0,25}",
        ifsc in "[A-Z0-9]{0,12}",
    ) {
        let engine = engine();
        let mut form = FormController::new(&engine);
        form.select_doc_type("BANK").unwrap();
        form.set_value("account_holder", holder).unwrap();
        form.set_value("account_number", account).unwrap();
        form.set_value("ifsc", ifsc).unwrap();

        let before = form.session().clone();
        let first = form.validate();
        prop_assert_eq!(form.validate(), first);
        prop_assert_eq!(form.session(), &before);
    }
}

//! Field Bindings
//!
//! Reactive wrapper around [`anecdotes::Field`]. A binding is created when
//! its form mounts and lives in that form's reactive scope.

use anecdotes::field::{Field, InputKind};
use leptos::*;

/// Attributes to place on an `<input>`: type, value and change handler
///
/// Reset is not part of the attribute set; see [`FieldBinding::reset`].
#[derive(Clone)]
pub struct FieldAttrs {
    pub kind: String,
    pub value: Signal<String>,
    pub on_input: Callback<ev::Event>,
}

/// A controlled input owned by one form
#[derive(Clone, Copy)]
pub struct FieldBinding {
    field: RwSignal<Field>,
}

impl FieldBinding {
    /// Input attributes, without the reset operation
    pub fn attrs(&self) -> FieldAttrs {
        let binding = *self;
        let field = self.field;

        FieldAttrs {
            kind: field.with_untracked(|f| f.kind().to_string()),
            value: Signal::derive(move || field.with(|f| f.value().to_string())),
            on_input: Callback::new(move |ev: ev::Event| binding.set(event_target_value(&ev))),
        }
    }

    /// Current value
    pub fn value(&self) -> String {
        self.field.with(|f| f.value().to_string())
    }

    /// Replace the value (what the change handler does with the event's value)
    pub fn set(&self, value: String) {
        self.field.update(|f| f.on_change(value));
    }

    /// Clear the value
    pub fn reset(&self) {
        self.field.update(Field::reset);
    }
}

/// Create an empty binding of the given input kind
pub fn use_field(kind: impl Into<InputKind>) -> FieldBinding {
    FieldBinding {
        field: create_rw_signal(Field::new(kind)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_lifecycle() {
        let runtime = create_runtime();

        let binding = use_field("text");
        assert_eq!(binding.value(), "");
        assert_eq!(binding.attrs().kind, "text");

        binding.set("abc".to_string());
        assert_eq!(binding.value(), "abc");
        assert_eq!(binding.attrs().value.get_untracked(), "abc");

        binding.reset();
        assert_eq!(binding.value(), "");

        runtime.dispose();
    }
}

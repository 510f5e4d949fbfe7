//! Macros for ergonomic action declaration.

/// Declare an action enum and implement [`Action`](crate::core::Action) for it.
///
/// Variants may be unit, tuple, or struct variants. Each variant's `kind`
/// is its name unless an explicit discriminant is given with `= "..."`.
///
/// # Example
///
/// ```
/// use refold::action_enum;
/// use refold::core::Action;
///
/// action_enum! {
///     pub enum TodoAction {
///         Add { text: String } = "ADD_TODO",
///         Toggle(usize),
///         ClearCompleted,
///     }
/// }
///
/// assert_eq!(TodoAction::Add { text: "x".into() }.kind(), "ADD_TODO");
/// assert_eq!(TodoAction::Toggle(0).kind(), "Toggle");
/// assert_eq!(TodoAction::ClearCompleted.kind(), "ClearCompleted");
/// ```
#[macro_export]
macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
                $( ( $($tuple_ty:ty),* $(,)? ) )?
                $( { $($field:ident : $field_ty:ty),* $(,)? } )?
                $( = $kind:literal )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
                $( ( $($tuple_ty),* ) )?
                $( { $($field : $field_ty),* } )?
            ),*
        }

        impl $crate::core::Action for $name {
            fn kind(&self) -> &str {
                match self {
                    $(Self::$variant { .. } => $crate::__action_kind!($variant $(, $kind)?)),*
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __action_kind {
    ($variant:ident) => {
        stringify!($variant)
    };
    ($variant:ident, $kind:literal) => {
        $kind
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Action;

    action_enum! {
        enum TestAction {
            Increment = "INCREMENT",
            Decrement = "DECREMENT",
            Add(i64),
            Rename { name: String },
            Noop,
        }
    }

    #[test]
    fn explicit_kinds_are_used() {
        assert_eq!(TestAction::Increment.kind(), "INCREMENT");
        assert_eq!(TestAction::Decrement.kind(), "DECREMENT");
    }

    #[test]
    fn variant_names_are_default_kinds() {
        assert_eq!(TestAction::Add(2).kind(), "Add");
        assert_eq!(
            TestAction::Rename {
                name: "x".to_string()
            }
            .kind(),
            "Rename"
        );
        assert_eq!(TestAction::Noop.kind(), "Noop");
    }

    #[test]
    fn generated_enum_derives_traits() {
        let action = TestAction::Add(5);
        let cloned = action.clone();
        assert_eq!(action, cloned);

        let json = serde_json::to_string(&action).unwrap();
        let deserialized: TestAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}

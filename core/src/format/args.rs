use crate::{ArgumentError, Object, Value};

/// The two views of an argument list used during one render.
///
/// Positional directives draw from an ordered queue; named directives look
/// up properties on a single object argument. When the template has named
/// directives, the first [`Value::Object`] argument becomes the lookup
/// source and is taken out of the positional queue. Otherwise every
/// argument is positional.
#[derive(Debug)]
pub(crate) struct Arguments<'v> {
    positional: Vec<&'v Value>,
    cursor: usize,
    named: Option<&'v Object>,
}

impl<'v> Arguments<'v> {
    pub(crate) fn new(values: &'v [Value], named_lookup: bool) -> Self {
        let source = if named_lookup {
            values.iter().position(|v| matches!(v, Value::Object(_)))
        } else {
            None
        };

        let named = source.and_then(|index| values[index].as_object());
        let positional = values
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != source)
            .map(|(_, value)| value)
            .collect();

        Self {
            positional,
            cursor: 0,
            named,
        }
    }

    /// Claims the next positional argument.
    pub(crate) fn next_positional(&mut self) -> Result<&'v Value, ArgumentError> {
        let index = self.cursor;
        let value = self
            .positional
            .get(index)
            .copied()
            .ok_or(ArgumentError::MissingPositional { index })?;
        self.cursor += 1;
        tracing::trace!(index, "bound positional argument");
        Ok(value)
    }

    /// Looks `name` up on the object argument without moving the cursor.
    pub(crate) fn named(&self, name: &str) -> Result<&'v Value, ArgumentError> {
        let object = self.named.ok_or_else(|| ArgumentError::MissingObject {
            name: name.to_owned(),
        })?;
        let value = object
            .get(name)
            .ok_or_else(|| ArgumentError::MissingProperty {
                name: name.to_owned(),
            })?;
        tracing::trace!(name, "bound named argument");
        Ok(value)
    }

    /// Number of positional arguments not yet claimed.
    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.positional.len() - self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object() -> Value {
        Object::new().with("x", 1337).into()
    }

    #[test]
    fn test_object_leaves_queue_when_named() {
        let values = [17.into(), object(), "bar".into()];
        let mut args = Arguments::new(&values, true);

        assert_eq!(args.remaining(), 2);
        assert_eq!(args.next_positional().unwrap(), &Value::from(17));
        assert_eq!(args.named("x").unwrap(), &Value::from(1337));
        assert_eq!(args.next_positional().unwrap(), &Value::from("bar"));
        assert_eq!(args.remaining(), 0);
    }

    #[test]
    fn test_object_stays_positional_without_named() {
        let values = [object()];
        let mut args = Arguments::new(&values, false);
        assert_eq!(args.next_positional().unwrap(), &object());
        assert!(matches!(
            args.named("x"),
            Err(ArgumentError::MissingObject { .. })
        ));
    }

    #[test]
    fn test_only_first_object_is_lookup_source() {
        let second = Value::from(Object::new().with("y", 2));
        let values = [object(), second.clone()];
        let mut args = Arguments::new(&values, true);

        assert_eq!(args.next_positional().unwrap(), &second);
        assert_eq!(
            args.named("y"),
            Err(ArgumentError::MissingProperty { name: "y".into() })
        );
    }

    #[test]
    fn test_exhausted_queue() {
        let values = [Value::from(1)];
        let mut args = Arguments::new(&values, false);
        args.next_positional().unwrap();
        assert_eq!(
            args.next_positional(),
            Err(ArgumentError::MissingPositional { index: 1 })
        );
    }
}

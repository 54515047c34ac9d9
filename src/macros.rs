/// Unwraps an `Ok(Some(_))` and turns `Ok(None)` into `None`, returning
/// early with `Some(Err(_))` from an `Iterator::next` on error.
#[macro_export]
macro_rules! try_some {
    ($expr:expr) => {
        match $expr {
            Ok(Some(v)) => Some(v),
            Ok(None) => None,
            Err(e) => return Some(Err(From::from(e))),
        }
    };
}

/// Fetches the field at `$index` of a sentence of kind `$kind`.
///
/// Evaluates to `Result<&str, ParseError>`, with
/// `ParseError::MalformedSentence` if the sentence is too short.
#[macro_export]
macro_rules! field {
    ($fields:expr, $kind:expr, $index:expr) => {
        match $fields.get($index) {
            Some(f) => Ok(*f),
            None => Err($crate::err::ParseError::from(($kind, $index, $fields.len()))),
        }
    };
}

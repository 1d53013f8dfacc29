#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! recognizer {
    (
        name: $name:expr,
        confidence: $confidence:expr
        $(, required_phrases: [ $($req_phrase:expr),* $(,)? ])?
        $(, buckets: $buckets:expr)?
        , extract: |$input:ident : &str, $ctx:ident : &Context| -> $ret_ty:ty $body_expr:block
        $(,)?
    ) => {{
        $crate::Recognizer {
            name: $name,
            confidence: $confidence,
            extract: Box::new(move |$input: &str, $ctx: &$crate::Context| {
                let result: $ret_ty = $body_expr;
                result
            }),
            required_phrases: &[ $($($req_phrase),*)? ],
            buckets: { 0 $(| $buckets)? },
        }
    }};
}

#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a grammar [`Rule`](crate::Rule).
///
/// The pattern is compiled once into a static; `buckets` lists the input
/// features the rule needs before its regex is worth running.
#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        pattern: $pat:literal
        $(, buckets: $buckets:expr)?
        , prod: |$caps:ident| $body:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            regex: $crate::regex!($pat),
            buckets: { $crate::engine::BucketMask::empty() $(| $buckets)? },
            production: |$caps: &regex::Captures<'_>| -> Option<$crate::TimePattern> { $body },
        }
    }};
}

//! Declarative script definitions.

/// Declare a script from handler functions named `<prefix>__<id>`.
///
/// Each listed function is registered under its own name, so its state id
/// comes from the trailing digits. Expands to a
/// [`ScriptBuilder`](crate::script::ScriptBuilder) chain and evaluates to
/// `Result<ScriptDefinition, AuthoringError>`.
///
/// # Example
///
/// ```
/// # #![allow(non_snake_case)]
/// use talkstate::core::{OptionTag, Pick, StepIndex, TransitionResult};
/// use talkstate::script;
///
/// fn hello__10(_: StepIndex, pick: Pick) -> Option<TransitionResult> {
///     match pick {
///         0 => Some(TransitionResult::Advance(20)),
///         _ => Some(TransitionResult::NoOp),
///     }
/// }
///
/// fn bye__20(_: StepIndex, _: Pick) -> Option<TransitionResult> {
///     Some(TransitionResult::Advance(0))
/// }
///
/// let definition = script! {
///     name: "villager",
///     first: 10,
///     handlers: [hello__10, bye__20],
///     options: { 10 => OptionTag::SelectableTalk },
/// }
/// .unwrap();
///
/// assert_eq!(definition.registry().ids(), vec![10, 20]);
/// ```
#[macro_export]
macro_rules! script {
    (
        name: $name:expr,
        first: $first:expr
        $(, select: $select:expr)?
        , handlers: [$($handler:ident),* $(,)?]
        $(, options: { $($option_id:expr => $tag:expr),* $(,)? })?
        $(,)?
    ) => {{
        let builder = $crate::script::ScriptBuilder::new($name).first($first);
        $(let builder = builder.select($select);)?
        $(let builder = builder.handler(stringify!($handler), $handler);)*
        $($(let builder = builder.option($option_id, $tag);)*)?
        builder.build()
    }};
}

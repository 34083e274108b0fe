use inline_calc::{
    configure, context,
    error::ContextError,
    interpreter::context::{Context, Rounding},
    solve,
};

// The global context is process-wide, so this file holds a single test.
#[test]
fn global_context_is_set_once() {
    assert_eq!(context(), Context::default());
    assert_eq!(solve("1/3").unwrap().to_string(), "0.333333333");

    let coarse = Context::new(4, Rounding::HalfUp).unwrap();
    assert_eq!(configure(coarse), Ok(()));
    assert_eq!(context(), coarse);
    assert_eq!(solve("2/3").unwrap().to_string(), "0.6667");

    assert_eq!(configure(Context::default()), Err(ContextError::AlreadyConfigured));
    assert_eq!(context(), coarse);
}

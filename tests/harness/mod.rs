mod test_context;

pub(crate) use test_context::TestContext;

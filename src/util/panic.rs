/// Asserts that the provided block panics, catching the unwind so that the test can continue.
#[cfg(test)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block was expected to panic, but returned normally")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
    };
}

#[cfg(test)]
pub(crate) use assert_panics;

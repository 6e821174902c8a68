use super::*;

#[test]
fn returns_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| 7), 7);
}

#[test]
fn deep_recursion_grows_the_stack() {
    fn depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(100_000), 100_000);
}

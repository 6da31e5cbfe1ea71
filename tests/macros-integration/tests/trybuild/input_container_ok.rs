use solution_core::SolutionContainer;
use solution_macros::solution_container;

pub struct Sink;

#[solution_container]
impl Sink {
    pub fn accept(&self, #[result] expected: i32) {
        let _ = expected;
    }
}

fn main() {
    let table = Sink.solution_methods();
    assert_eq!(table.len(), 1);
    assert!(table[0].parameters[0].result_marker);
}

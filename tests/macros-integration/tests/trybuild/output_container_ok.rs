use solution_core::SolutionContainer;
use solution_macros::solution_container;

pub struct Doubler;

#[solution_container]
impl Doubler {
    #[solution]
    pub fn solve(&self, input: i32) -> i32 {
        input * 2
    }
}

fn main() {
    let table = Doubler.solution_methods();
    assert_eq!(table.len(), 1);
    assert!(table[0].solution_marker);
}

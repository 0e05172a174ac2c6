use miette::Result;

use nodelint_ops::ops_resolve::describe_constraints;

pub fn exec(spec: &str) -> Result<()> {
    for group in describe_constraints(spec)? {
        println!("{group}");
    }
    Ok(())
}

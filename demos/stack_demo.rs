//! Push/pop walkthrough over a stack of single-byte elements

use anyhow::Result;
use bytestack::RawStack;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut stack = RawStack::new(size_of::<u8>())?;
    println!("{}", u8::from(stack.is_empty()?));

    stack.push(&[3])?;
    stack.push(&[20])?;
    stack.push(&[30])?;

    println!("{}", stack.peek_top()?[0]);
    stack.pop()?;

    println!("{}", stack.peek_top()?[0]);
    stack.pop()?;

    println!("{}", stack.peek_top()?[0]);

    println!("{}", stack.len()?);

    stack.destroy()?;

    Ok(())
}

mod scanner;
mod char_scanner;
mod math_tokenizer;

pub use scanner::Scanner;
pub use math_tokenizer::{MathTokenizer, MathToken, NEGATE};

#[cfg(test)]
mod scanner_test;

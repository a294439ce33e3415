#[cfg(test)]
mod prober_tests;

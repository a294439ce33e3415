#[cfg(test)]
mod classifier_tests;

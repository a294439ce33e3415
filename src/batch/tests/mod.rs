#[cfg(test)]
mod router_tests;








#[cfg(test)]
mod test_pp_use;


pub mod common;

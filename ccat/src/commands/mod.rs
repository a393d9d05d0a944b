pub mod ccat;

pub mod tshirt;

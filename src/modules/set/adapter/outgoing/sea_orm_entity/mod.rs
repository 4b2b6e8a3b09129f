pub mod sets;

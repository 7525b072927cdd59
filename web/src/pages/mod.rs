pub mod dog_detail;
pub mod dog_list;

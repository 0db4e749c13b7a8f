pub mod a001_production_item;

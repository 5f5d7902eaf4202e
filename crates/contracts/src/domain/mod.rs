pub mod a025_product_type;

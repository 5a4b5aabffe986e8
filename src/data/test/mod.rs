mod giveaway;
mod product_key;
mod resolved_giveaway;

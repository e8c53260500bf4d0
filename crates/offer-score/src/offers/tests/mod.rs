mod common;
mod scoring;
mod validation;
mod weights;

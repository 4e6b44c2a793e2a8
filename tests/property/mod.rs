mod engine;
mod repeat;

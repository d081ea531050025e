mod concurrency;
mod persistence;

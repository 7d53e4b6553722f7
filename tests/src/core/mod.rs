mod scanner;
mod source;

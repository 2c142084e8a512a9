mod catalog;
mod check;
mod exec;
mod help;
mod report;
mod run;

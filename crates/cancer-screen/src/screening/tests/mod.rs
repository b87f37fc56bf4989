mod common;
mod prostate;
mod triage;

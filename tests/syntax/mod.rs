mod tests_edits;
mod tests_file_loading;
mod tests_scenarios;

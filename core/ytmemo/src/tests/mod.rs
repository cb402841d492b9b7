//! 複数の usecase をまたぐシナリオテスト

mod app_controller_tests;
mod fakes;

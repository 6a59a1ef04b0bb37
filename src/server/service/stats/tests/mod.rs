mod goal_assist_log;

use navi_test_utils::prelude::*;

use super::*;

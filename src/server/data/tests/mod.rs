mod player;

use navi_test_utils::prelude::*;
